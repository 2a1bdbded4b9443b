pub mod add_assignment;
