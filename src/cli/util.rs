use crate::core::error::{ArgMalformedError, ArgMissingError, Error, GateError};

pub fn get_flag_val<T>(args: &[String], flag: &str) -> Result<T, Error>
where
    T: std::str::FromStr,
{
    for i in 0..args.len().saturating_sub(1) {
        let args_flag = &args[i];
        let args_flag_val = &args[i + 1];

        if args_flag == flag {
            // a value starting with "-" is the next flag, not a value
            if args_flag_val.starts_with("-") {
                break;
            }

            return match args_flag_val.parse::<T>() {
                Ok(parsed_val) => Ok(parsed_val),
                Err(_) => Err(ArgMalformedError::default()),
            };
        }
    }

    Err(ArgMissingError::default())
}
