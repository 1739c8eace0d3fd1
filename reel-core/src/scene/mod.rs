pub(crate) mod context;
pub(crate) mod model;
pub(crate) mod timeline;
pub(crate) mod tree;
