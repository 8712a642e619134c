//! Required-field validation for the login and registration forms.

/// Outcome of validating a form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Validation {
	/// `true` when no field is missing.
	pub is_valid: bool,
	/// One message per missing field, in form order.
	pub errors: Vec<String>,
}

/// Check that every field has a non-blank value.
pub fn validate_form<'a, I>(fields: I) -> Validation
where
	I: IntoIterator<Item = (&'a str, &'a str)>,
{
	let errors: Vec<String> = fields
		.into_iter()
		.filter(|(_, value)| value.trim().is_empty())
		.map(|(key, _)| format!("{key} is required"))
		.collect();
	Validation {
		is_valid: errors.is_empty(),
		errors,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn filled_form_is_valid() {
		let v = validate_form([("email", "jane@smis.edu"), ("password", "hunter2")]);
		assert!(v.is_valid);
		assert!(v.errors.is_empty());
	}

	#[test]
	fn blank_fields_are_reported_in_order() {
		let v = validate_form([("name", "  "), ("email", "jane@smis.edu"), ("password", "")]);
		assert!(!v.is_valid);
		assert_eq!(v.errors, vec!["name is required", "password is required"]);
	}

	#[test]
	fn empty_form_is_valid() {
		assert!(validate_form(Vec::<(&str, &str)>::new()).is_valid);
	}
}
