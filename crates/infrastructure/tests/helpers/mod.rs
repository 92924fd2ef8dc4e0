#![allow(dead_code, unused_imports)]

mod dns_server_mock;

pub use dns_server_mock::MockDnsServer;
pub use shared_buffer::SharedBuffer;
