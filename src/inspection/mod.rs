pub mod debug_table;
