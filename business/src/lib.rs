pub mod application {
    pub mod admin {
        pub mod action_runner;
        pub mod bookings;
        pub mod collection;
        pub mod orders;
    }
    pub mod cart {
        pub mod store;
    }
    pub mod catalog {
        pub mod products;
    }
    pub mod statistics {
        pub mod dashboard;
    }
}

pub mod domain {
    pub mod errors;
    pub mod interaction;
    pub mod logger;
    pub mod booking {
        pub mod gateway;
        pub mod model;
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod gateway;
        pub mod model;
    }
    pub mod order {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod value_objects;
    }
    pub mod product {
        pub mod errors;
        pub mod gateway;
        pub mod model;
    }
    pub mod session {
        pub mod errors;
        pub mod model;
        pub mod repository;
    }
    pub mod shared {
        pub mod pagination;
        pub mod record;
    }
    pub mod statistics {
        pub mod gateway;
        pub mod model;
    }
}

#[cfg(test)]
mod test_support;
