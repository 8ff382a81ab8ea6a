pub(crate) mod collection_products;
pub(crate) mod get_collection;
pub(crate) mod get_product;
pub(crate) mod list_collections;
pub(crate) mod list_products;
