pub(crate) mod color_transfer;
pub(crate) mod composite;
