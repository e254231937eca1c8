//! Integration tests for factprune

mod cli_commands;
mod mount_cleaning;
mod test_utils;
