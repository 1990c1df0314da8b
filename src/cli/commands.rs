//! CLI command handlers.

use strum::IntoEnumIterator;

use crate::client::{ApiResponse, LicenseType, RadioCodeCalculator};
use crate::error::ErrorCode;
use crate::models::{CatalogModel, RadioModel};

use super::{CalcArgs, ModelArgs, SerialArgs};

type CommandResult = Result<ErrorCode, Box<dyn std::error::Error>>;

/// Handle `radio-code login`.
pub async fn handle_login(calculator: &RadioCodeCalculator) -> CommandResult {
    let response = calculator.login().await;
    if let Some(license) = &response.payload {
        println!("License activation status - {}", license.activation_status);
        println!("License owner - {}", license.user_name);
        println!(
            "License type - {}",
            match license.license_type {
                LicenseType::Personal => "Personal",
                LicenseType::Company => "Company",
            }
        );
        println!("Expiration date - {}", license.expiration_date);
    }
    Ok(report(&response))
}

/// Handle `radio-code list`.
pub async fn handle_list(calculator: &RadioCodeCalculator) -> CommandResult {
    let response = calculator.list().await;
    if let Some(models) = &response.payload {
        println!("Supported radio models {}", models.len());
        for model in models {
            print_model(model);
        }
    }
    Ok(report(&response))
}

/// Handle `radio-code info <model>`.
pub async fn handle_info(calculator: &RadioCodeCalculator, args: &ModelArgs) -> CommandResult {
    let response = calculator.info(args.model.as_str()).await;
    if let Some(model) = &response.payload {
        print_model(model);
    }
    Ok(report(&response))
}

/// Handle `radio-code calc <model> <serial>`.
pub async fn handle_calc(calculator: &RadioCodeCalculator, args: &CalcArgs) -> CommandResult {
    let input = &args.input;
    let extra = input.extra.as_deref();
    let response = if args.no_validate {
        calculator.calc(input.model.as_str(), &input.serial, extra).await
    } else {
        calculator
            .calc_checked(input.model.as_str(), &input.serial, extra)
            .await
    };

    if let Some(code) = &response.payload {
        println!("Radio code is {code}");
    } else if let Some(hint) = response.rejection_hint() {
        if let Some(len) = hint.serial_max_len {
            eprintln!("Expected serial length - {len}");
        }
        let pattern = hint
            .serial_patterns
            .as_ref()
            .and_then(|p| p.get(calculator.language_tag()));
        if let Some(pattern) = pattern {
            eprintln!("Expected serial pattern - {pattern}");
        }
    }
    Ok(report(&response))
}

/// Handle `radio-code validate <model> <serial>`.
pub fn handle_validate(args: &SerialArgs) -> CommandResult {
    let model: CatalogModel = args.model.parse()?;
    let model = model.model();
    let error = model.validate(&args.serial, args.extra.as_deref());
    if error.is_success() {
        println!("Serial number is valid for {}", model.name());
    } else {
        eprintln!("{error}");
        match error {
            ErrorCode::InvalidSerialLength => {
                eprintln!("Expected length {}", model.serial_max_len())
            }
            ErrorCode::InvalidSerialPattern => {
                eprintln!("Expected pattern {}", model.serial_pattern())
            }
            ErrorCode::InvalidExtraLength => {
                eprintln!("Expected extra data length {}", model.extra_max_len())
            }
            _ => {}
        }
    }
    Ok(error)
}

/// Handle `radio-code models`.
pub fn handle_models() -> CommandResult {
    for entry in CatalogModel::iter() {
        println!("{entry:?}: {}", entry.model());
    }
    Ok(ErrorCode::Success)
}

fn print_model(model: &RadioModel) {
    println!("Radio model name - {}", model.name());
    println!("Max. length of the radio serial number - {}", model.serial_max_len());
    println!("Regex pattern for the radio serial number - {}", model.serial_pattern());
    if model.uses_extra() {
        println!("Max. length of the radio extra data - {}", model.extra_max_len());
        println!(
            "Regex pattern for the radio extra data - {}",
            model.extra_pattern().unwrap_or_default()
        );
    }
    println!();
}

fn report<T>(response: &ApiResponse<T>) -> ErrorCode {
    match response.error {
        ErrorCode::Success => {}
        ErrorCode::InvalidLicense => eprintln!("Invalid license key!"),
        error => eprintln!("{error}"),
    }
    response.error
}
