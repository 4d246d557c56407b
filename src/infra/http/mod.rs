pub mod dummyjson;
