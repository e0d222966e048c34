pub mod shared {
    pub mod infrastructure {
        pub mod key_value_store;
    }
}

pub mod modules {
    pub mod timesheet {
        pub mod core {
            pub mod clock_time;
            pub mod entry;
            pub mod errors;
            pub mod events;
            pub mod evolve;
            pub mod history;
            pub mod hours;
            pub mod period;
            pub mod ports;
            pub mod settings;
            pub mod state;
            pub mod summary;
        }
        pub mod use_cases {
            pub mod application_error;
            pub mod command_flow;
            pub mod add_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_settings {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod summarize_timesheet {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod export_timesheet {
                pub mod command;
                pub mod decide;
                pub mod exporter_port;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod download_history {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod suggest_location {
                pub mod handler;
                pub mod suggester_port;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod gemini_location_suggester;
                pub mod key_value_history_repository;
                pub mod key_value_timesheet_repository;
                pub mod markdown_exporter;
            }
        }
    }
}

pub mod shell;
