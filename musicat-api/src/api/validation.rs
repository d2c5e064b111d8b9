//! Field validation for write payloads

use musicat_common::db::{NewAlbum, NewArtist, NewBand, NewSong};
use musicat_common::{Reference, Sex, Title};

use super::auth::{LoginRequest, RegisterRequest};

/// Payload checks run by [`super::extract::ValidatedJson`]; the error is
/// the message returned to the client.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

fn check_len(field: &str, value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(format!("{} must be {} to {} characters", field, min, max));
    }
    Ok(())
}

fn check_range(field: &str, value: i64, min: i64, max: i64) -> Result<(), String> {
    if value < min || value > max {
        return Err(format!("{} must be between {} and {}", field, min, max));
    }
    Ok(())
}

fn check_price(price: f64) -> Result<(), String> {
    if !price.is_finite() || price < 0.0 {
        return Err("price must be a non-negative number".to_string());
    }
    Ok(())
}

fn check_sex(sex_id: Reference) -> Result<(), String> {
    match sex_id {
        Reference::Present(id) if Sex::from_id(id).is_none() => Err(format!("unknown sex_id {}", id)),
        _ => Ok(()),
    }
}

fn check_title(title_id: Reference) -> Result<(), String> {
    match title_id {
        Reference::Present(id) if Title::from_id(id).is_none() => Err(format!("unknown title_id {}", id)),
        _ => Ok(()),
    }
}

impl Validate for NewArtist {
    fn validate(&self) -> Result<(), String> {
        check_len("first_name", &self.first_name, 1, 100)?;
        check_len("last_name", &self.last_name, 1, 100)?;
        check_len("nationality", &self.nationality, 1, 100)?;
        check_range("age", self.age, 0, 150)?;
        check_sex(self.sex_id)?;
        check_title(self.title_id)
    }
}

impl Validate for NewBand {
    fn validate(&self) -> Result<(), String> {
        check_len("name", &self.name, 1, 100)?;
        check_len("nationality", &self.nationality, 1, 100)?;
        check_range("number_of_members", self.number_of_members, 1, 500)?;
        check_range("age", self.age, 0, 150)
    }
}

impl Validate for NewAlbum {
    fn validate(&self) -> Result<(), String> {
        check_len("title", &self.title, 1, 100)?;
        check_price(self.price)
    }
}

impl Validate for NewSong {
    fn validate(&self) -> Result<(), String> {
        check_len("title", &self.title, 1, 1000)?;
        if self.length < 0 {
            return Err("length must not be negative".to_string());
        }
        check_price(self.price)
    }
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), String> {
        check_len("username", &self.username, 3, 50)?;
        if !self.email.contains('@') {
            return Err("email must be a valid address".to_string());
        }
        if self.password.chars().count() < 8 {
            return Err("password must be at least 8 characters".to_string());
        }
        Ok(())
    }
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), String> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err("username and password are required".to_string());
        }
        Ok(())
    }
}
