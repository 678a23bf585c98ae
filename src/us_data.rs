//! US states and a handful of representative cities for each, used to
//! offer choices to the user.

/// State name paired with six of its cities.
pub const STATE_CITIES: &[(&str, [&str; 6])] = &[
    (
        "Alabama",
        ["Birmingham", "Montgomery", "Huntsville", "Mobile", "Tuscaloosa", "Hoover"],
    ),
    (
        "Alaska",
        ["Anchorage", "Fairbanks", "Juneau", "Sitka", "Ketchikan", "Wasilla"],
    ),
    (
        "Arizona",
        ["Phoenix", "Tucson", "Mesa", "Chandler", "Scottsdale", "Glendale"],
    ),
    (
        "Arkansas",
        ["Little Rock", "Fort Smith", "Fayetteville", "Springdale", "Jonesboro", "North Little Rock"],
    ),
    (
        "California",
        ["Los Angeles", "San Diego", "San Jose", "San Francisco", "Fresno", "Sacramento"],
    ),
    (
        "Colorado",
        ["Denver", "Colorado Springs", "Aurora", "Fort Collins", "Lakewood", "Thornton"],
    ),
    (
        "Connecticut",
        ["Bridgeport", "New Haven", "Hartford", "Stamford", "Waterbury", "Norwalk"],
    ),
    (
        "Delaware",
        ["Wilmington", "Dover", "Newark", "Middletown", "Smyrna", "Milford"],
    ),
    (
        "Florida",
        ["Jacksonville", "Miami", "Tampa", "Orlando", "St. Petersburg", "Hialeah"],
    ),
    (
        "Georgia",
        ["Atlanta", "Augusta", "Columbus", "Savannah", "Athens", "Suwanee"],
    ),
    (
        "Hawaii",
        ["Honolulu", "Pearl City", "Hilo", "Kailua", "Waipahu", "Kaneohe"],
    ),
    (
        "Idaho",
        ["Boise", "Meridian", "Nampa", "Idaho Falls", "Pocatello", "Caldwell"],
    ),
    (
        "Illinois",
        ["Chicago", "Aurora", "Rockford", "Joliet", "Naperville", "Springfield"],
    ),
    (
        "Indiana",
        ["Indianapolis", "Fort Wayne", "Evansville", "South Bend", "Carmel", "Fishers"],
    ),
    (
        "Iowa",
        ["Des Moines", "Cedar Rapids", "Davenport", "Sioux City", "Iowa City", "Waterloo"],
    ),
    (
        "Kansas",
        ["Wichita", "Overland Park", "Kansas City", "Olathe", "Topeka", "Lawrence"],
    ),
    (
        "Kentucky",
        ["Louisville", "Lexington", "Bowling Green", "Owensboro", "Covington", "Richmond"],
    ),
    (
        "Louisiana",
        ["New Orleans", "Baton Rouge", "Shreveport", "Lafayette", "Lake Charles", "Kenner"],
    ),
    (
        "Maine",
        ["Portland", "Lewiston", "Bangor", "South Portland", "Auburn", "Biddeford"],
    ),
    (
        "Maryland",
        ["Baltimore", "Columbia", "Germantown", "Silver Spring", "Waldorf", "Frederick"],
    ),
    (
        "Massachusetts",
        ["Boston", "Worcester", "Springfield", "Lowell", "Cambridge", "New Bedford"],
    ),
    (
        "Michigan",
        ["Detroit", "Grand Rapids", "Warren", "Sterling Heights", "Lansing", "Ann Arbor"],
    ),
    (
        "Minnesota",
        ["Minneapolis", "Saint Paul", "Rochester", "Duluth", "Bloomington", "Brooklyn Park"],
    ),
    (
        "Mississippi",
        ["Jackson", "Gulfport", "Southaven", "Hattiesburg", "Biloxi", "Meridian"],
    ),
    (
        "Missouri",
        ["Kansas City", "Saint Louis", "Springfield", "Independence", "Columbia", "Lee's Summit"],
    ),
    (
        "Montana",
        ["Billings", "Missoula", "Great Falls", "Bozeman", "Butte", "Helena"],
    ),
    (
        "Nebraska",
        ["Omaha", "Lincoln", "Bellevue", "Grand Island", "Kearney", "Fremont"],
    ),
    (
        "Nevada",
        ["Las Vegas", "Henderson", "Reno", "North Las Vegas", "Sparks", "Carson City"],
    ),
    (
        "New Hampshire",
        ["Manchester", "Nashua", "Concord", "Derry", "Dover", "Rochester"],
    ),
    (
        "New Jersey",
        ["Newark", "Jersey City", "Paterson", "Elizabeth", "Edison", "Woodbridge"],
    ),
    (
        "New Mexico",
        ["Albuquerque", "Las Cruces", "Rio Rancho", "Santa Fe", "Roswell", "Farmington"],
    ),
    (
        "New York",
        ["New York City", "Buffalo", "Rochester", "Yonkers", "Syracuse", "Albany"],
    ),
    (
        "North Carolina",
        ["Charlotte", "Raleigh", "Greensboro", "Durham", "Winston-Salem", "Fayetteville"],
    ),
    (
        "North Dakota",
        ["Fargo", "Bismarck", "Grand Forks", "Minot", "West Fargo", "Mandan"],
    ),
    (
        "Ohio",
        ["Columbus", "Cleveland", "Cincinnati", "Toledo", "Akron", "Dayton"],
    ),
    (
        "Oklahoma",
        ["Oklahoma City", "Tulsa", "Norman", "Broken Arrow", "Lawton", "Edmond"],
    ),
    (
        "Oregon",
        ["Portland", "Eugene", "Salem", "Gresham", "Hillsboro", "Beaverton"],
    ),
    (
        "Pennsylvania",
        ["Philadelphia", "Pittsburgh", "Allentown", "Erie", "Reading", "Scranton"],
    ),
    (
        "Rhode Island",
        ["Providence", "Warwick", "Cranston", "Pawtucket", "East Providence", "Woonsocket"],
    ),
    (
        "South Carolina",
        ["Columbia", "Charleston", "North Charleston", "Mount Pleasant", "Rock Hill", "Greenville"],
    ),
    (
        "South Dakota",
        ["Sioux Falls", "Rapid City", "Aberdeen", "Brookings", "Watertown", "Mitchell"],
    ),
    (
        "Tennessee",
        ["Nashville", "Memphis", "Knoxville", "Chattanooga", "Clarksville", "Murfreesboro"],
    ),
    (
        "Texas",
        ["Houston", "San Antonio", "Dallas", "Austin", "Fort Worth", "El Paso"],
    ),
    (
        "Utah",
        ["Salt Lake City", "West Valley City", "Provo", "West Jordan", "Orem", "Sandy"],
    ),
    (
        "Vermont",
        ["Burlington", "South Burlington", "Rutland", "Essex", "Colchester", "Bennington"],
    ),
    (
        "Virginia",
        ["Virginia Beach", "Norfolk", "Chesapeake", "Richmond", "Newport News", "Alexandria"],
    ),
    (
        "Washington",
        ["Seattle", "Spokane", "Tacoma", "Vancouver", "Bellevue", "Kent"],
    ),
    (
        "West Virginia",
        ["Charleston", "Huntington", "Morgantown", "Parkersburg", "Wheeling", "Weirton"],
    ),
    (
        "Wisconsin",
        ["Milwaukee", "Madison", "Green Bay", "Kenosha", "Racine", "Appleton"],
    ),
    (
        "Wyoming",
        ["Cheyenne", "Casper", "Laramie", "Gillette", "Rock Springs", "Sheridan"],
    ),
];

/// State names in alphabetical order.
pub fn states() -> impl Iterator<Item = &'static str> {
    STATE_CITIES.iter().map(|(state, _)| *state)
}

/// Cities listed for `state`, matched case-insensitively.
pub fn cities_for(state: &str) -> Option<&'static [&'static str]> {
    STATE_CITIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(state.trim()))
        .map(|(_, cities)| cities.as_slice())
}
