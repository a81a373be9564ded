pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod get;
        pub mod remove_item;
    }
    pub mod product {
        pub mod apply_discount;
        pub mod bulk_discount;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_recommendations;
        pub mod set_related;
        pub mod update;
    }
    pub mod voice_cart {
        pub mod process;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod get;
            pub mod remove_item;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod apply_discount;
            pub mod bulk_discount;
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_recommendations;
            pub mod set_related;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod voice_cart {
        pub mod errors;
        pub mod matcher;
        pub mod model;
        pub mod quantity;
        pub mod vocabulary;
        pub mod use_cases {
            pub mod process;
        }
    }
}

#[cfg(test)]
mod test_support;
