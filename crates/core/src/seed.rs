// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::SessionState;
use denuncia_domain::{Category, ComplaintRecord, Priority, ReferenceCode, Reporter, Status};

/// Creates a session state pre-populated with the demo dataset.
///
/// The dataset covers the category, priority, status, and anonymity
/// combinations the review surface needs to demonstrate: two resolved
/// records, two pending ones, one under review, and one under
/// investigation, with a mix of anonymous and identified reporters.
/// Records are ordered newest first and the submission counter
/// continues from the seed count.
#[must_use]
pub fn seeded_session() -> SessionState {
    SessionState::with_complaints(vec![
        ComplaintRecord {
            id: 6,
            reference_code: ReferenceCode::new(2025, 6),
            category: Category::AbuseOfAuthority,
            title: String::from("Retención arbitraria durante revisión vial"),
            description: String::from(
                "Agentes de tránsito retuvieron el vehículo sin justificar el motivo \
                 ni levantar acta de la revisión.",
            ),
            incident_date: String::from("2025-04-18"),
            incident_time: Some(String::from("21:15")),
            address: String::from("Calz. de Tlalpan 1420"),
            neighborhood: Some(String::from("Portales")),
            city: String::from("Ciudad de México"),
            reporter: Reporter::Anonymous,
            attached_file_names: Vec::new(),
            involved_authorities: Some(String::from("Agentes de tránsito, turno nocturno")),
            witnesses: None,
            priority: Priority::Medium,
            status: Status::Pending,
            registered_at: String::from("2025-04-19T08:12:00.000000000Z"),
        },
        ComplaintRecord {
            id: 5,
            reference_code: ReferenceCode::new(2025, 5),
            category: Category::Environmental,
            title: String::from("Descarga de residuos industriales en el río"),
            description: String::from(
                "Una planta descarga residuos directamente al cauce del río durante \
                 la madrugada; el agua baja con espuma y olor químico.",
            ),
            incident_date: String::from("2025-03-10"),
            incident_time: Some(String::from("07:45")),
            address: String::from("Camino al Río km 3"),
            neighborhood: None,
            city: String::from("León"),
            reporter: Reporter::Anonymous,
            attached_file_names: vec![String::from("descarga_rio.mp4")],
            involved_authorities: None,
            witnesses: None,
            priority: Priority::High,
            status: Status::Pending,
            registered_at: String::from("2025-03-10T14:30:00.000000000Z"),
        },
        ComplaintRecord {
            id: 4,
            reference_code: ReferenceCode::new(2025, 4),
            category: Category::Corruption,
            title: String::from("Desvío de recursos en obra pública"),
            description: String::from(
                "La obra de pavimentación se reporta como concluida en el portal de \
                 transparencia, pero la calle sigue sin pavimentar.",
            ),
            incident_date: String::from("2025-01-15"),
            incident_time: None,
            address: String::from("Calle Hidalgo, tramo norte"),
            neighborhood: Some(String::from("El Vergel")),
            city: String::from("Zapopan"),
            reporter: Reporter::Identified {
                name: String::from("María López Hernández"),
                phone: String::from("3331234567"),
                email: String::from("maria.lopez@example.com"),
            },
            attached_file_names: vec![
                String::from("contrato_obra.pdf"),
                String::from("fotos_calle.zip"),
            ],
            involved_authorities: Some(String::from("Dirección de Obras Públicas")),
            witnesses: None,
            priority: Priority::Urgent,
            status: Status::UnderInvestigation,
            registered_at: String::from("2025-01-16T10:05:00.000000000Z"),
        },
        ComplaintRecord {
            id: 3,
            reference_code: ReferenceCode::new(2024, 3),
            category: Category::Negligence,
            title: String::from("Fuga de agua sin atender"),
            description: String::from(
                "Fuga de agua potable reportada tres veces al organismo operador sin \
                 que se presente una cuadrilla a repararla.",
            ),
            incident_date: String::from("2024-12-01"),
            incident_time: None,
            address: String::from("Calle Morelos 88"),
            neighborhood: Some(String::from("Centro")),
            city: String::from("Monterrey"),
            reporter: Reporter::Anonymous,
            attached_file_names: vec![String::from("fuga_esquina.jpg")],
            involved_authorities: None,
            witnesses: Some(String::from("Vecinos de la calle Morelos")),
            priority: Priority::Urgent,
            status: Status::Resolved,
            registered_at: String::from("2024-12-02T09:40:00.000000000Z"),
        },
        ComplaintRecord {
            id: 2,
            reference_code: ReferenceCode::new(2024, 2),
            category: Category::PublicServices,
            title: String::from("Alumbrado público sin funcionar"),
            description: String::from(
                "Cuatro luminarias apagadas desde hace semanas en el tramo entre la \
                 avenida y la escuela primaria.",
            ),
            incident_date: String::from("2024-11-20"),
            incident_time: Some(String::from("20:00")),
            address: String::from("Av. Revolución 230"),
            neighborhood: Some(String::from("Americana")),
            city: String::from("Guadalajara"),
            reporter: Reporter::Identified {
                name: String::from("Juan Pérez García"),
                phone: String::from("3312345678"),
                email: String::from("juan.perez@example.com"),
            },
            attached_file_names: Vec::new(),
            involved_authorities: None,
            witnesses: None,
            priority: Priority::Medium,
            status: Status::UnderReview,
            registered_at: String::from("2024-11-21T18:22:00.000000000Z"),
        },
        ComplaintRecord {
            id: 1,
            reference_code: ReferenceCode::new(2024, 1),
            category: Category::Corruption,
            title: String::from("Cobro indebido por trámite de licencia"),
            description: String::from(
                "En la ventanilla pidieron un pago adicional en efectivo para agilizar \
                 la entrega de la licencia de conducir.",
            ),
            incident_date: String::from("2024-11-02"),
            incident_time: Some(String::from("11:30")),
            address: String::from("Blvd. Adolfo López Mateos 1801"),
            neighborhood: None,
            city: String::from("León"),
            reporter: Reporter::Anonymous,
            attached_file_names: vec![String::from("recibo_pago.jpg")],
            involved_authorities: Some(String::from("Ventanilla 4, oficina de tránsito")),
            witnesses: None,
            priority: Priority::High,
            status: Status::Resolved,
            registered_at: String::from("2024-11-05T12:00:00.000000000Z"),
        },
    ])
}
