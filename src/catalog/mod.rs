pub(crate) mod batch;
pub(crate) mod builtin;
pub(crate) mod model;
