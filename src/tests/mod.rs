mod hash_table;
mod orders;
mod customers;
mod settings;
