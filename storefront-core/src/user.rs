// User repo/service layer
use crate::{
    db,
    error::StorefrontError,
    models::*,
    reqres,
    utils,
};
use log::{
    debug,
    error,
    info,
};

/// Create a new user
pub fn create(
    db: &db::DatabaseEnvironment,
    r_user: &reqres::UserRequest,
) -> Result<User, StorefrontError> {
    validate_user(r_user)?;
    let uid: String = format!("{}{}", crate::USER_DB_KEY, utils::generate_rnd());
    let new_user = User {
        uid: String::from(&uid),
        name: String::from(r_user.name.trim()),
        email: String::from(r_user.email.trim()),
        created: chrono::offset::Utc::now().timestamp(),
    };
    debug!("insert user: {:?}", &new_user);
    let v = bincode::serialize(&new_user)?;
    db.write(uid.as_bytes(), &v)?;
    // in order to retrieve all users, write keys to with ul
    debug!("writing user index {} for id: {}", crate::USER_LIST_DB_KEY, &uid);
    db.append_index(crate::USER_LIST_DB_KEY, &uid)?;
    Ok(new_user)
}

/// User lookup
pub fn find(db: &db::DatabaseEnvironment, uid: &str) -> Result<User, StorefrontError> {
    if !utils::is_record_id(crate::USER_DB_KEY, uid) {
        return Err(StorefrontError::NotFound);
    }
    let r = db.read(uid.as_bytes())?;
    if r.is_empty() {
        error!("user not found");
        return Err(StorefrontError::NotFound);
    }
    let user: User = bincode::deserialize(&r[..])?;
    Ok(user)
}

/// User lookup for all
pub fn find_all(db: &db::DatabaseEnvironment) -> Result<Vec<User>, StorefrontError> {
    let v_uid = db.read_index(crate::USER_LIST_DB_KEY)?;
    let mut users: Vec<User> = Vec::with_capacity(v_uid.len());
    for u in v_uid {
        users.push(find(db, &u)?);
    }
    Ok(users)
}

/// check user fields before anything is written
fn validate_user(u: &reqres::UserRequest) -> Result<(), StorefrontError> {
    info!("validating user: {}", &u.name);
    let (name, email) = (u.name.trim(), u.email.trim());
    if name.is_empty() {
        return Err(StorefrontError::Validation(String::from("name is required")));
    }
    if email.len() < 3 || !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(StorefrontError::Validation(String::from("email is invalid")));
    }
    if name.len() >= utils::string_limit() || email.len() >= utils::string_limit() {
        return Err(StorefrontError::Validation(String::from("field too long")));
    }
    Ok(())
}

// Tests
//-------------------------------------------------------------------------------
