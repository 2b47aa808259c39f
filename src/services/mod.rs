pub(crate) mod sitemap;
