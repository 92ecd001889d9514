pub mod modules {
    pub mod users {
        pub mod core {
            pub mod ports;
            pub mod user;
        }
        pub mod use_cases {
            pub mod me {
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod resolve_user_reference {
                pub mod handler;
                pub mod reference;
                pub mod inbound {
                    pub mod graphql;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod user_directory_in_memory;
            }
        }
    }
}

pub mod shell;
