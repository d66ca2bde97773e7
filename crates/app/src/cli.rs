//! Command-line definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "lodging")]
#[command(about = "Manage hotels, customers and reservations.")]
pub struct CommandLine {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the data directory from the config
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage hotels
    #[command(subcommand)]
    Hotel(HotelCommand),
    /// Manage customers
    #[command(subcommand)]
    Customer(CustomerCommand),
    /// Inspect reservations
    #[command(subcommand)]
    Reservation(ReservationCommand),
    /// Reserve a room for a customer
    #[command(alias = "r")]
    Reserve { customer_id: Uuid, hotel_id: Uuid },
    /// Cancel a reservation and release its room
    Cancel { reservation_id: Uuid },
}

#[derive(Subcommand)]
pub enum HotelCommand {
    Create {
        name: String,
        location: String,
        total_rooms: i64,
    },
    Show {
        id: Uuid,
    },
    Update {
        id: Uuid,
        #[command(flatten)]
        fields: HotelFields,
    },
    Delete {
        id: Uuid,
    },
    List,
}

#[derive(Args)]
pub struct HotelFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub total_rooms: Option<i64>,
}

#[derive(Subcommand)]
pub enum CustomerCommand {
    Create {
        name: String,
        email: String,
        phone: String,
    },
    Show {
        id: Uuid,
    },
    Update {
        id: Uuid,
        #[command(flatten)]
        fields: CustomerFields,
    },
    Delete {
        id: Uuid,
    },
    List,
}

#[derive(Args)]
pub struct CustomerFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Subcommand)]
pub enum ReservationCommand {
    Show { id: Uuid },
    List,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
