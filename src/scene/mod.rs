pub(crate) mod assets;
pub(crate) mod composer;
pub(crate) mod model;
