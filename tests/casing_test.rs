use wirecase::casing::*;

#[test]
fn test_hump_to_snake_camel_case() {
    assert_eq!(hump_to_snake("emailAddress"), "email_address");
    assert_eq!(hump_to_snake("dayOfWeekIndex"), "day_of_week_index");

    // Digits stay with the preceding word
    assert_eq!(hump_to_snake("emailAddress1"), "email_address1");
    assert_eq!(hump_to_snake("addUserSchedule1"), "add_user_schedule1");
}

#[test]
fn test_hump_to_snake_pascal_case() {
    // No leading underscore for a leading capital
    assert_eq!(hump_to_snake("EmailAddress"), "email_address");
    assert_eq!(pascal_to_snake("EmailAddress1"), "email_address1");
    assert_eq!(camel_to_snake("emailAddress1"), "email_address1");
}

#[test]
fn test_hump_to_snake_lowercase_is_unchanged() {
    assert_eq!(hump_to_snake(""), "");
    assert_eq!(hump_to_snake("a"), "a");
    assert_eq!(hump_to_snake("name"), "name");
    assert_eq!(hump_to_snake("already_snake"), "already_snake");

    // Only the leading capital gets lowercased
    assert_eq!(hump_to_snake("Name"), "name");
}

#[test]
fn test_hump_to_snake_capital_runs() {
    // Every capital starts a new word, so the run can be restored
    assert_eq!(hump_to_snake("ABC"), "a_b_c");
    assert_eq!(hump_to_snake("userID"), "user_i_d");
    assert_eq!(snake_to_camel(&hump_to_snake("userID")), "userID");
}

#[test]
fn test_snake_to_hump() {
    assert_eq!(snake_to_hump("email_address"), "EmailAddress");
    assert_eq!(snake_to_hump("email_address1"), "EmailAddress1");
    assert_eq!(snake_to_hump("name"), "Name");

    // Rest of each word is lowercased
    assert_eq!(snake_to_hump("EMAIL_ADDRESS"), "EmailAddress");

    // Digit-only words are kept as they are
    assert_eq!(snake_to_hump("line_2_total"), "Line2Total");

    // Empty words disappear
    assert_eq!(snake_to_hump("email__address"), "EmailAddress");
    assert_eq!(snake_to_hump("_private"), "Private");
    assert_eq!(snake_to_hump(""), "");
}

#[test]
fn test_snake_to_camel() {
    assert_eq!(snake_to_camel("email_address"), "emailAddress");
    assert_eq!(snake_to_camel("email_address1"), "emailAddress1");
    assert_eq!(snake_to_camel("name"), "name");
    assert_eq!(snake_to_camel(""), "");
}

#[test]
fn test_identifier_round_trip() {
    let identifiers = [
        "emailAddress1",
        "ianaTimezone",
        "scheduleByLanguageCode",
        "isActive",
        "twoFactorAuthenticationCode",
        "x",
    ];

    for ident in identifiers {
        let wire = hump_to_snake(ident);
        assert!(is_snake_case(&wire), "{} is not snake_case", wire);
        assert_eq!(snake_to_camel(&wire), ident);
    }

    // Pascal identifiers come back through snake_to_hump
    assert_eq!(snake_to_hump(&hump_to_snake("LanguageCode")), "LanguageCode");
}

#[test]
fn test_to_title_case() {
    assert_eq!(to_title_case("a normal sentence"), "A Normal Sentence");
    assert_eq!(
        to_title_case("a mOsT uNUSUal SenTenCE"),
        "A Most Unusual Sentence"
    );

    // Runs of spaces are kept
    assert_eq!(
        to_title_case("a  mOsT  uNUSUal     senTenCE"),
        "A  Most  Unusual     Sentence"
    );
    assert_eq!(to_title_case(""), "");
}

#[test]
fn test_is_snake_case() {
    assert!(is_snake_case("email_address1"));
    assert!(is_snake_case("name"));
    assert!(is_snake_case(""));
    assert!(!is_snake_case("emailAddress"));
    assert!(!is_snake_case("Name"));

    // Only lowercase letters, digits and underscores are wire keys
    assert!(is_snake_case("line_2_total"));
    assert!(!is_snake_case("email-address"));
    assert!(!is_snake_case("email address"));
    assert!(!is_snake_case("email.address"));
}

#[test]
fn test_key_case_apply() {
    assert_eq!(KeyCase::Snake.apply("emailAddress1"), "email_address1");
    assert_eq!(KeyCase::Camel.apply("email_address1"), "emailAddress1");
    assert_eq!(KeyCase::Pascal.apply("email_address1"), "EmailAddress1");
    assert_eq!(KeyCase::default(), KeyCase::Camel);
}

#[test]
fn test_key_case_parse() {
    assert_eq!("snake".parse::<KeyCase>().unwrap(), KeyCase::Snake);
    assert_eq!("Camel".parse::<KeyCase>().unwrap(), KeyCase::Camel);
    assert_eq!("PascalCase".parse::<KeyCase>().unwrap(), KeyCase::Pascal);
    assert_eq!("snake_case".parse::<KeyCase>().unwrap(), KeyCase::Snake);
    assert_eq!(" camel-case ".parse::<KeyCase>().unwrap(), KeyCase::Camel);

    let err = "kebab".parse::<KeyCase>().unwrap_err();
    assert!(err.contains("invalid value 'kebab'"));
    assert!(err.contains("snake, camel, pascal"));

    let err = "  ".parse::<KeyCase>().unwrap_err();
    assert!(err.contains("cannot be empty"));
}

#[test]
fn test_key_case_display() {
    for case in KeyCase::ALL {
        assert_eq!(case.to_string().parse::<KeyCase>().unwrap(), case);
    }
}
