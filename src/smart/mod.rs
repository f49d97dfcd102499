// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Smart commit message prediction module.

mod engine;
mod templates;

pub use engine::{Alternative, Prediction, PredictionEngine};
pub use templates::{
    clean_scope, describe, DescriptionContext, FirstPicker, RandomPicker, VariantPicker,
};
