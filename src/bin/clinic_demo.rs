//! Console demo of the clinicore data layer.
//!
//! Builds a hospital with departments and rooms, registers physicians and
//! patients, schedules appointments, then exercises the generic store:
//! lookup by attribute, delete by identity, list the survivors.

use chrono::{Duration, NaiveDate, Utc};
use tracing_subscriber::EnvFilter;

use clinicore::{
    AppointmentManager, AppointmentStatus, AttributeValue, BloodType, ClinicResult, Department,
    Hospital, InMemoryStore, MedicalSpecialty, Patient, Physician, Record, RecordId, RecordStore,
};

fn main() -> ClinicResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("===== HOSPITAL MANAGEMENT DEMO =====\n");

    let patient_store: InMemoryStore<Patient> = InMemoryStore::new();
    let physician_store: InMemoryStore<Physician> = InMemoryStore::new();
    let appointment_store = InMemoryStore::new();

    let mut hospital = build_hospital()?;
    let physicians = register_physicians(&mut hospital)?;
    let mut saved_physicians = Vec::new();
    for physician in physicians {
        saved_physicians.push(physician_store.save(physician)?);
    }

    let patients = register_patients(&mut hospital)?;
    let mut saved_patients = Vec::new();
    for patient in patients {
        saved_patients.push(patient_store.save(patient)?);
    }

    let mut manager = AppointmentManager::new();
    schedule_appointments(&mut manager, &hospital, &saved_patients, &saved_physicians)?;
    for patient in &saved_patients {
        for appointment in manager.appointments_for_patient(patient.dni()) {
            appointment_store.save(appointment.clone())?;
        }
    }

    print_report(&hospital, &manager);

    println!("\n===== STORE EXERCISES =====");

    println!("Find patient with dni=11111111:");
    let hits =
        patient_store.find_by_attribute("dni", &AttributeValue::from("11111111"))?;
    for patient in &hits {
        println!("  {} (dni {})", patient.full_name(), patient.dni());
    }

    println!("\nDelete patient with id=1:");
    if let Some(removed) = patient_store.delete(RecordId::from_raw(1))? {
        println!("  removed: {}", removed.full_name());
    }

    println!("\nPatients still in memory:");
    for patient in patient_store.find_all()? {
        println!(
            "  #{} {} (dni {})",
            patient
                .ident()
                .map_or_else(|| "?".to_string(), |id| id.to_string()),
            patient.full_name(),
            patient.dni()
        );
    }

    print_statistics(&patient_store, &physician_store, &appointment_store)?;

    println!("\n===== DEMO FINISHED =====");
    Ok(())
}

fn build_hospital() -> ClinicResult<Hospital> {
    println!("Initializing hospital and departments...");

    let mut hospital = Hospital::builder()
        .name("Hospital Central")
        .address("Av. Libertador 1234")
        .phone("011-4567-8901")
        .build()?;

    for (name, specialty) in [
        ("Cardiology", MedicalSpecialty::Cardiology),
        ("Pediatrics", MedicalSpecialty::Pediatrics),
        ("Traumatology", MedicalSpecialty::Traumatology),
    ] {
        let department = Department::builder()
            .name(name)
            .specialty(specialty)
            .build()?;
        hospital.add_department(department);
    }

    for department in hospital.departments_mut() {
        match department.specialty() {
            MedicalSpecialty::Cardiology => {
                department.create_room("CARD-101", "consulting room");
                department.create_room("CARD-102", "operating room");
            }
            MedicalSpecialty::Pediatrics => {
                department.create_room("PED-201", "consulting room");
            }
            MedicalSpecialty::Traumatology => {
                department.create_room("TRAUMA-301", "emergency");
            }
            _ => {}
        }
    }

    println!(
        "Hospital initialized with {} departments\n",
        hospital.departments().len()
    );
    Ok(hospital)
}

fn register_physicians(hospital: &mut Hospital) -> ClinicResult<Vec<Physician>> {
    println!("Registering specialist physicians...");

    let roster = [
        (
            "Carlos",
            "González",
            "12345678",
            (1975, 5, 15),
            BloodType::APositive,
            "MP-12345",
            MedicalSpecialty::Cardiology,
        ),
        (
            "Ana",
            "Martínez",
            "23456789",
            (1980, 8, 22),
            BloodType::ONegative,
            "MP-23456",
            MedicalSpecialty::Pediatrics,
        ),
        (
            "Luis",
            "Rodríguez",
            "34567890",
            (1978, 3, 10),
            BloodType::BPositive,
            "MP-34567",
            MedicalSpecialty::Traumatology,
        ),
    ];

    let mut physicians = Vec::new();
    for (first, last, dni, (y, m, d), blood, license, specialty) in roster {
        let physician = Physician::builder()
            .first_name(first)
            .last_name(last)
            .dni(dni)
            .birth_date(demo_date(y, m, d))
            .blood_type(blood)
            .license(license)
            .specialty(specialty)
            .build()?;
        for department in hospital.departments_mut() {
            if department.specialty() == physician.specialty() {
                department.add_physician(physician.clone());
            }
        }
        physicians.push(physician);
    }

    println!("Registered {} specialist physicians\n", physicians.len());
    Ok(physicians)
}

fn register_patients(hospital: &mut Hospital) -> ClinicResult<Vec<Patient>> {
    println!("Registering patients...");

    let mut p1 = Patient::builder()
        .first_name("María")
        .last_name("López")
        .dni("11111111")
        .birth_date(demo_date(1985, 12, 5))
        .blood_type(BloodType::APositive)
        .phone("011-1111-1111")
        .address("Calle Falsa 123")
        .build()?;
    p1.history_mut().add_diagnosis("arterial hypertension");
    p1.history_mut().add_treatment("enalapril 10mg");
    p1.history_mut().add_allergy("penicillin");

    let mut p2 = Patient::builder()
        .first_name("Pedro")
        .last_name("García")
        .dni("22222222")
        .birth_date(demo_date(2010, 6, 15))
        .blood_type(BloodType::OPositive)
        .phone("011-2222-2222")
        .address("Av. Siempreviva 456")
        .build()?;
    p2.history_mut().add_diagnosis("routine pediatric check-up");
    p2.history_mut().add_treatment("vaccinations up to date");

    let mut p3 = Patient::builder()
        .first_name("Elena")
        .last_name("Fernández")
        .dni("33333333")
        .birth_date(demo_date(1992, 9, 28))
        .blood_type(BloodType::AbNegative)
        .phone("011-3333-3333")
        .address("Belgrano 789")
        .build()?;
    p3.history_mut().add_diagnosis("wrist fracture");
    p3.history_mut()
        .add_treatment("immobilization and physiotherapy");
    p3.history_mut().add_allergy("ibuprofen");

    let patients = vec![p1, p2, p3];
    for patient in &patients {
        hospital.register_patient(patient.clone());
    }

    println!(
        "Registered {} patients with medical histories\n",
        patients.len()
    );
    Ok(patients)
}

fn schedule_appointments(
    manager: &mut AppointmentManager,
    hospital: &Hospital,
    patients: &[Patient],
    physicians: &[Physician],
) -> ClinicResult<()> {
    println!("Scheduling appointments...");

    let base = Utc::now() + Duration::days(1);
    let bookings = [
        (0usize, MedicalSpecialty::Cardiology, base, 150_000_00u64),
        (
            1,
            MedicalSpecialty::Pediatrics,
            base + Duration::days(1),
            80_000_00,
        ),
        (
            2,
            MedicalSpecialty::Traumatology,
            base + Duration::days(2),
            120_000_00,
        ),
    ];

    for (patient_idx, specialty, at, fee) in bookings {
        let Some(patient) = patients.get(patient_idx) else {
            continue;
        };
        let Some(physician) = physicians.iter().find(|p| p.specialty() == specialty) else {
            continue;
        };
        let Some(room) = hospital
            .department_by_specialty(specialty)
            .and_then(|d| d.rooms().first())
        else {
            continue;
        };
        manager.schedule(patient.clone(), physician.clone(), room.clone(), at, fee)?;
    }

    // The demo marks the first two visits as already underway.
    if let Some(appt) = manager.appointments_mut().first_mut() {
        appt.set_status(AppointmentStatus::Completed);
        appt.set_notes("patient with a history of hypertension");
    }
    if let Some(appt) = manager.appointments_mut().get_mut(1) {
        appt.set_status(AppointmentStatus::InProgress);
        appt.set_notes("routine check-up - vaccinations");
    }

    println!("Scheduled {} appointments\n", manager.appointments().len());
    Ok(())
}

fn print_report(hospital: &Hospital, manager: &AppointmentManager) {
    println!("===== {} =====", hospital.name());
    println!("{} | {}", hospital.address(), hospital.phone());

    for department in hospital.departments() {
        println!(
            "\n[{}] {} - {} room(s), {} physician(s)",
            department.specialty(),
            department.name(),
            department.rooms().len(),
            department.physicians().len()
        );
        for room in department.rooms() {
            println!("  room {} ({})", room.code(), room.kind());
        }
    }

    println!("\nAppointments by patient:");
    for patient in hospital.patients() {
        let appointments = manager.appointments_for_patient(patient.dni());
        println!(
            "  {} ({}): {} appointment(s)",
            patient.full_name(),
            patient.dni(),
            appointments.len()
        );
        for appointment in appointments {
            println!(
                "    {} with {} in {} [{}]",
                appointment.scheduled_at().format("%Y-%m-%d %H:%M"),
                appointment.physician().full_name(),
                appointment.room().code(),
                appointment.status()
            );
        }
    }
}

fn print_statistics(
    patients: &InMemoryStore<Patient>,
    physicians: &InMemoryStore<Physician>,
    appointments: &InMemoryStore<clinicore::Appointment>,
) -> ClinicResult<()> {
    println!("\n===== FINAL STATISTICS =====");
    println!("patients in store:     {}", patients.find_all()?.len());
    println!("physicians in store:   {}", physicians.find_all()?.len());
    println!("appointments in store: {}", appointments.find_all()?.len());
    Ok(())
}

fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
