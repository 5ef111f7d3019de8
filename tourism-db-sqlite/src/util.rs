use anyhow::anyhow;
use num_traits::{FromPrimitive, ToPrimitive};
use tourism_core::{
    entities::{format_date, parse_date, Date},
    repositories as repo,
};

type Result<T> = std::result::Result<T, repo::Error>;

pub fn load_date(date: &str) -> Result<Date> {
    parse_date(date).map_err(|err| anyhow!("Invalid date '{date}' in database: {err}").into())
}

pub fn store_date(date: Date) -> String {
    format_date(date)
}

pub fn load_enum<T: FromPrimitive>(name: &str, value: i16) -> Result<T> {
    T::from_i16(value).ok_or_else(|| anyhow!("Invalid {name} in database: {value}").into())
}

pub fn store_enum<T: ToPrimitive>(value: T) -> i16 {
    // Discriminants are small positive integers.
    value.to_i16().unwrap_or_default()
}

pub fn load_small(name: &str, value: i16) -> Result<u8> {
    u8::try_from(value).map_err(|_| anyhow!("Invalid {name} in database: {value}").into())
}

pub fn load_u16(name: &str, value: i32) -> Result<u16> {
    u16::try_from(value).map_err(|_| anyhow!("Invalid {name} in database: {value}").into())
}
