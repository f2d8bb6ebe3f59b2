//! Messages handled by the article form's `update` function.

use common::form::FieldId;

use crate::api::ApiError;

pub enum Msg {
    /// A control with a known field id changed its value.
    FieldChanged(FieldId, String),
    Submit,
    /// The create or update call started by `Submit` has completed.
    /// `failure` prefixes the console message when `outcome` is an error.
    SubmitSettled {
        outcome: Result<(), ApiError>,
        failure: &'static str,
    },
    Cancel,
}
