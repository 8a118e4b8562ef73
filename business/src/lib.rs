pub mod application {
    pub mod connectivity {
        pub mod probe;
    }
    pub mod diagnostics {
        pub mod get;
    }
    pub mod recipe {
        pub mod extract;
    }
}

pub mod domain {
    pub mod logger;
    pub mod connectivity {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod probe;
        }
    }
    pub mod diagnostics {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod get;
        }
    }
    pub mod recipe {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod extract;
        }
    }
}
