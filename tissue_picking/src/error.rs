// Copyright 2025 the Tissue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the feature layer.

use tissue_index::IndexError;

use crate::types::FeatureId;

/// Failure of a [`FeatureLayer`](crate::FeatureLayer) operation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PickError {
    /// The spatial index rejected the operation.
    #[error(transparent)]
    Index(#[from] IndexError<f64>),
    /// A feature with this id is already present.
    #[error("{0} is already in the layer")]
    DuplicateFeature(FeatureId),
    /// No feature with this id is present.
    #[error("{0} is not in the layer")]
    UnknownFeature(FeatureId),
    /// Feature positions must be finite.
    #[error("{0} has a non-finite position")]
    NonFinitePosition(FeatureId),
    /// The view transform cannot be inverted, so screen bands cannot be mapped to the scene.
    #[error("view transform is not invertible")]
    SingularTransform,
}
