pub mod u501_add_patient;
