// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::{LoginRequest, SubmitComplaintRequest};
use denuncia::{Command, SessionState, apply, seeded_session};

pub fn create_valid_request() -> SubmitComplaintRequest {
    SubmitComplaintRequest {
        category: String::from("Corruption"),
        title: String::from("Bribe requested at permit office"),
        description: String::from("An official requested a payment to speed up a permit"),
        incident_date: String::from("2024-05-10"),
        incident_time: Some(String::from("14:30")),
        address: String::from("Av. Juárez 123"),
        neighborhood: Some(String::from("Centro")),
        city: String::from("León"),
        is_anonymous: true,
        reporter_name: String::new(),
        reporter_phone: String::new(),
        reporter_email: String::new(),
        attached_file_names: vec![String::from("recibo.pdf")],
        involved_authorities: None,
        witnesses: None,
        priority: String::from("High"),
    }
}

pub fn create_login_request() -> LoginRequest {
    LoginRequest {
        username: String::from("admin"),
        password: String::from("admin123"),
    }
}

pub fn create_authenticated_seeded_state() -> SessionState {
    apply(&seeded_session(), Command::LogIn).new_state
}
