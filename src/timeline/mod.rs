pub(crate) mod entrance;
pub(crate) mod slides;
