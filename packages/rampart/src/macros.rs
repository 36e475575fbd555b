#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: ErrorCode = $err;
                log!($env, "Error {} thrown at {}:{}", error_code as u32, file!(), line!());
                Err(error_code)
            }
        }
    };
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {
        {
        if ($assert) {
            Ok(())
        } else {
            let error_code: ErrorCode = $err;
            log!($env, "Error {} thrown at {}:{}", error_code as u32, file!(), line!());
            log!($env, $($arg)*);
            Err(error_code)
        }
        }
    };
}

#[macro_export]
macro_rules! safe_increment {
    ($struct:expr, $value:expr, $env:expr) => {{
        $struct = $struct.safe_add($value, $env)?
    }};
}

#[macro_export]
macro_rules! safe_decrement {
    ($struct:expr, $value:expr, $env:expr) => {{
        $struct = $struct.safe_sub($value, $env)?
    }};
}
