pub(crate) mod batch;
pub(crate) mod convert;
pub(crate) mod progress;
