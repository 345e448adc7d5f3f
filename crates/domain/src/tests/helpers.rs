// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Category, ComplaintInput, ComplaintRecord, Priority, ReferenceCode, Reporter, Status,
};

pub fn create_test_complaint(id: u64, category: Category, status: Status) -> ComplaintRecord {
    ComplaintRecord {
        id,
        reference_code: ReferenceCode::new(2024, id),
        category,
        title: format!("Test complaint {id}"),
        description: String::from("Detailed description of the reported facts"),
        incident_date: String::from("2024-05-10"),
        incident_time: None,
        address: String::from("Av. Juárez 123"),
        neighborhood: None,
        city: String::from("León"),
        reporter: Reporter::Anonymous,
        attached_file_names: Vec::new(),
        involved_authorities: None,
        witnesses: None,
        priority: Priority::Medium,
        status,
        registered_at: String::from("2024-05-11T09:00:00.000000000Z"),
    }
}

pub fn create_test_input() -> ComplaintInput {
    ComplaintInput {
        category: Category::Corruption,
        title: String::from("Bribe requested at permit office"),
        description: String::from("An official requested a payment to speed up a permit"),
        incident_date: String::from("2024-05-10"),
        incident_time: Some(String::from("14:30")),
        address: String::from("Av. Juárez 123"),
        neighborhood: Some(String::from("Centro")),
        city: String::from("León"),
        reporter: Reporter::Anonymous,
        attached_file_names: vec![String::from("recibo.pdf")],
        involved_authorities: None,
        witnesses: None,
        priority: Priority::High,
    }
}
