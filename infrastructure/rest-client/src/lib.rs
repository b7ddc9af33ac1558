pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod timestamp;
pub mod booking {
    pub mod dto;
    pub mod gateway;
}
pub mod cart {
    pub mod dto;
    pub mod gateway;
}
pub mod order {
    pub mod dto;
    pub mod gateway;
}
pub mod product {
    pub mod dto;
    pub mod gateway;
}
pub mod statistics {
    pub mod dto;
    pub mod gateway;
}

#[cfg(test)]
mod test_server;
