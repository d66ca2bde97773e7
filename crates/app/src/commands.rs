//! Command dispatch onto the booking desk

use lodging_core::{BookingDesk, CustomerUpdate, HotelUpdate, Result};

use crate::cli::{
    Commands, CustomerCommand, CustomerFields, HotelCommand, HotelFields, ReservationCommand,
};

impl From<HotelFields> for HotelUpdate {
    fn from(fields: HotelFields) -> Self {
        HotelUpdate {
            name: fields.name,
            location: fields.location,
            total_rooms: fields.total_rooms,
        }
    }
}

impl From<CustomerFields> for CustomerUpdate {
    fn from(fields: CustomerFields) -> Self {
        CustomerUpdate {
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
        }
    }
}

/// Run one command, returning the text to print
pub fn run(desk: &mut BookingDesk, command: Commands) -> Result<String> {
    match command {
        Commands::Hotel(cmd) => hotel(desk, cmd),
        Commands::Customer(cmd) => customer(desk, cmd),
        Commands::Reservation(cmd) => reservation(desk, cmd),
        Commands::Reserve {
            customer_id,
            hotel_id,
        } => Ok(desk.make_reservation(customer_id, hotel_id)?.to_string()),
        Commands::Cancel { reservation_id } => {
            Ok(desk.cancel_reservation(reservation_id)?.to_string())
        }
    }
}

fn hotel(desk: &mut BookingDesk, cmd: HotelCommand) -> Result<String> {
    match cmd {
        HotelCommand::Create {
            name,
            location,
            total_rooms,
        } => Ok(desk.create_hotel(&name, &location, total_rooms)?.to_string()),
        HotelCommand::Show { id } => desk.show_hotel(id),
        HotelCommand::Update { id, fields } => {
            Ok(desk.update_hotel(id, fields.into())?.to_string())
        }
        HotelCommand::Delete { id } => {
            let hotel = desk.delete_hotel(id)?;
            Ok(format!("Hotel {} deleted", hotel.id))
        }
        HotelCommand::List => Ok(join(desk.hotels().list())),
    }
}

fn customer(desk: &mut BookingDesk, cmd: CustomerCommand) -> Result<String> {
    match cmd {
        CustomerCommand::Create { name, email, phone } => {
            Ok(desk.create_customer(&name, &email, &phone)?.to_string())
        }
        CustomerCommand::Show { id } => desk.show_customer(id),
        CustomerCommand::Update { id, fields } => {
            Ok(desk.update_customer(id, fields.into())?.to_string())
        }
        CustomerCommand::Delete { id } => {
            let customer = desk.delete_customer(id)?;
            Ok(format!("Customer {} deleted", customer.id))
        }
        CustomerCommand::List => Ok(join(desk.customers().list())),
    }
}

fn reservation(desk: &mut BookingDesk, cmd: ReservationCommand) -> Result<String> {
    match cmd {
        ReservationCommand::Show { id } => desk.show_reservation(id),
        ReservationCommand::List => Ok(join(desk.reservations().list())),
    }
}

fn join<T: std::fmt::Display>(records: &[T]) -> String {
    records
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
