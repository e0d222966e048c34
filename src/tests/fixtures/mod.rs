pub mod commands {
    pub mod add_time_entry;
}
pub mod history;
pub mod state;
