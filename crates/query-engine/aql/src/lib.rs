pub mod aql;
