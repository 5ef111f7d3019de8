///////////////////////////////////////////////////////////////////////
// Destinations
///////////////////////////////////////////////////////////////////////

table! {
    destination (id) {
        id -> BigInt,
        name -> Text,
        latitude -> Double,
        longitude -> Double,
    }
}

///////////////////////////////////////////////////////////////////////
// Points of interest
///////////////////////////////////////////////////////////////////////

table! {
    poi (id) {
        id -> BigInt,
        kind -> SmallInt,
        created_at -> BigInt,
        updated_at -> BigInt,
        destination_id -> Nullable<BigInt>,
        name -> Text,
        description -> Nullable<Text>,
        latitude -> Nullable<Double>,
        longitude -> Nullable<Double>,
        price -> Nullable<Double>,
        image -> Nullable<Text>,
        phone -> Nullable<Text>,
        website -> Nullable<Text>,
        stars -> Nullable<SmallInt>,
        forks -> Nullable<SmallInt>,
        cuisine -> Nullable<Text>,
        category -> Nullable<Text>,
        hours -> Nullable<Text>,
        festival_date -> Nullable<Text>,
        email -> Nullable<Text>,
        period -> Nullable<Text>,
        site_type -> Nullable<Text>,
        location -> Nullable<Text>,
    }
}

joinable!(poi -> destination (destination_id));

///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> BigInt,
        email -> Text,
        password -> Text,
        role -> SmallInt,
        username -> Nullable<Text>,
        firstname -> Text,
        lastname -> Text,
        phonenumber -> Nullable<Text>,
        gender -> Nullable<Text>,
        dateofbirth -> Nullable<Text>,
        location -> Nullable<Text>,
        profilepic -> Nullable<Text>,
        block_start -> Nullable<BigInt>,
        block_end -> Nullable<BigInt>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Reviews, favorites, clicks
///////////////////////////////////////////////////////////////////////

table! {
    review (id) {
        id -> BigInt,
        entity_type -> SmallInt,
        entity_id -> BigInt,
        user_id -> BigInt,
        rating -> SmallInt,
        comment -> Nullable<Text>,
        image -> Nullable<Text>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(review -> users (user_id));

table! {
    favorite (id) {
        id -> BigInt,
        user_id -> BigInt,
        entity_type -> SmallInt,
        entity_id -> BigInt,
        created_at -> BigInt,
    }
}

joinable!(favorite -> users (user_id));

table! {
    click_history (id) {
        id -> BigInt,
        user_id -> BigInt,
        entity_type -> SmallInt,
        entity_id -> BigInt,
        clicked_at -> BigInt,
    }
}

joinable!(click_history -> users (user_id));

///////////////////////////////////////////////////////////////////////
// Circuits
///////////////////////////////////////////////////////////////////////

table! {
    circuit (id) {
        id -> BigInt,
        created_at -> BigInt,
        updated_at -> BigInt,
        name -> Text,
        circuit_code -> Text,
        departure_city -> Text,
        arrival_city -> Text,
        price -> Double,
        duration -> Integer,
        description -> Nullable<Text>,
    }
}

table! {
    circuit_schedule (circuit_id, position) {
        circuit_id -> BigInt,
        position -> Integer,
        day -> Integer,
        destination_id -> BigInt,
        description -> Nullable<Text>,
    }
}

joinable!(circuit_schedule -> circuit (circuit_id));
joinable!(circuit_schedule -> destination (destination_id));

table! {
    circuit_history (id) {
        id -> BigInt,
        circuit_id -> BigInt,
        departure_date -> Text,
        arrival_date -> Text,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(circuit_history -> circuit (circuit_id));

///////////////////////////////////////////////////////////////////////
// Preferences
///////////////////////////////////////////////////////////////////////

table! {
    preference (user_id) {
        user_id -> BigInt,
        budget -> Double,
        accommodation -> SmallInt,
        stars -> SmallInt,
        forks -> SmallInt,
        departure_date -> Text,
        arrival_date -> Text,
        departure_city_id -> Nullable<BigInt>,
        arrival_city_id -> Nullable<BigInt>,
    }
}

joinable!(preference -> users (user_id));

table! {
    preference_activity_category (user_id, position) {
        user_id -> BigInt,
        position -> Integer,
        label -> Text,
    }
}

table! {
    preference_cuisine (user_id, position) {
        user_id -> BigInt,
        position -> Integer,
        label -> Text,
    }
}

allow_tables_to_appear_in_same_query!(
    destination,
    poi,
    users,
    review,
    favorite,
    click_history,
    circuit,
    circuit_schedule,
    circuit_history,
    preference,
    preference_activity_category,
    preference_cuisine,
);
