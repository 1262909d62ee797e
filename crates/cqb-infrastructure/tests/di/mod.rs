//! Activation and caching tests

mod serializer_cache_test;
mod service_cache_test;
