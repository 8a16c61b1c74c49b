use yaazoru_test_utils::prelude::*;

use crate::{
    model::customer::CustomerRequest,
    server::{
        error::{record::RecordError, validation::ValidationError, Error},
        service::customer::CustomerService,
    },
};

mod list;

fn request(seed: u32) -> CustomerRequest {
    CustomerRequest {
        first_name: "Dana".to_string(),
        last_name: "Levi".to_string(),
        id_number: factory::id_number(seed),
        email: factory::email("dana", seed),
        phone_number: factory::phone_number(seed),
        additional_phone: None,
        address: "12 Rothschild Blvd".to_string(),
        city: "Tel Aviv".to_string(),
    }
}
