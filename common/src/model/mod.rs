pub mod species;
