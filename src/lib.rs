pub mod config;

pub mod modules {
    pub mod todos {
        pub mod core {
            pub mod errors;
            pub mod inputs;
            pub mod model;
        }
        pub mod inbound {
            pub mod http;
        }
        pub mod store;
    }
}

pub mod shell;
