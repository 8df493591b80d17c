macro_rules! verify_or {
    ($condition: expr, $result: expr) => {
        if !$condition {
            $result
        }
    };
}

macro_rules! reject {
    ($result: expr) => {
        return Ok(Outcome::Invalid($result))
    };
}

macro_rules! accept {
    () => {
        Ok(Outcome::Valid(()))
    };
    ($value: expr) => {
        Ok(Outcome::Valid($value))
    };
}

/// Unwrap a valid outcome, or return the rejection to the caller.
macro_rules! valid_or_reject {
    ($outcome: expr) => {
        match $outcome? {
            Outcome::Valid(value) => value,
            Outcome::Invalid(invalid) => reject!(invalid),
        }
    };
}
