pub mod shared {
    pub mod core {
        pub mod primitives;
    }

    pub mod infrastructure {
        pub mod upstream;
    }
}

pub mod modules {
    pub mod work_items {
        pub mod core {
            pub mod enrich;
            pub mod enriched_task;
            pub mod reference;
            pub mod work_item;
        }

        pub mod use_cases {
            pub mod list_tasks {
                pub mod handler;

                pub mod inbound {
                    pub mod http;
                }
            }

            pub mod get_details {
                pub mod inbound {
                    pub mod http;
                }
            }

            pub mod update_task {
                pub mod command;
                pub mod handler;

                pub mod inbound {
                    pub mod http;
                }
            }

            pub mod start_task {
                pub mod inbound {
                    pub mod http;
                }
            }

            pub mod finish_task {
                pub mod inbound {
                    pub mod http;
                }
            }
        }

        pub mod adapters {
            pub mod outbound {
                pub mod reference_loader;
            }
        }
    }

    pub mod shifts {
        pub mod core {
            pub mod shift;
        }

        pub mod use_cases {
            pub mod list_shifts {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod config;
pub mod shell;
