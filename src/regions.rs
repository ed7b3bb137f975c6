//! Indian states and union territories with the city used for their weather.

/// State or union territory name and its capital, in display order.
pub const STATE_CAPITALS: [(&str, &str); 36] = [
    ("Andhra Pradesh", "Amaravati"),
    ("Arunachal Pradesh", "Itanagar"),
    ("Assam", "Dispur"),
    ("Bihar", "Patna"),
    ("Chhattisgarh", "Raipur"),
    ("Goa", "Panaji"),
    ("Gujarat", "Gandhinagar"),
    ("Haryana", "Chandigarh"),
    ("Himachal Pradesh", "Shimla"),
    ("Jharkhand", "Ranchi"),
    ("Karnataka", "Bengaluru"),
    ("Kerala", "Thiruvananthapuram"),
    ("Madhya Pradesh", "Bhopal"),
    ("Maharashtra", "Mumbai"),
    ("Manipur", "Imphal"),
    ("Meghalaya", "Shillong"),
    ("Mizoram", "Aizawl"),
    ("Nagaland", "Kohima"),
    ("Odisha", "Bhubaneswar"),
    ("Punjab", "Chandigarh"),
    ("Rajasthan", "Jaipur"),
    ("Sikkim", "Gangtok"),
    ("Tamil Nadu", "Chennai"),
    ("Telangana", "Hyderabad"),
    ("Tripura", "Agartala"),
    ("Uttar Pradesh", "Lucknow"),
    ("Uttarakhand", "Dehradun"),
    ("West Bengal", "Kolkata"),
    ("Andaman and Nicobar Islands", "Port Blair"),
    ("Chandigarh", "Chandigarh"),
    ("Dadra and Nagar Haveli and Daman and Diu", "Daman"),
    ("Delhi", "Delhi"),
    ("Jammu and Kashmir", "Srinagar"),
    ("Ladakh", "Leh"),
    ("Lakshadweep", "Kavaratti"),
    ("Puducherry", "Puducherry"),
];

/// Capital of `state`, matched exactly first and then ignoring case and
/// surrounding whitespace.
pub fn capital_of(state: &str) -> Option<&'static str> {
    if let Some((_, capital)) = STATE_CAPITALS.iter().find(|(name, _)| *name == state) {
        return Some(*capital);
    }
    let wanted = state.trim();
    STATE_CAPITALS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map(|(_, capital)| *capital)
}

/// All state names, in display order.
pub fn states() -> impl Iterator<Item = &'static str> {
    STATE_CAPITALS.iter().map(|(name, _)| *name)
}
