use super::*;

pub fn register_user(connections: &sqlite::Connections, new_user: usecases::NewUser) -> Result<User> {
    let email = new_user.email.clone();
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::register_with_email(conn, new_user).map_err(|err| {
            warn!("Failed to register user with email {email}: {err}");
            err
        })
    })?)
}

/// Accounts with admin privileges can only be created
/// from the command line.
pub fn create_admin(connections: &sqlite::Connections, new_user: usecases::NewUser) -> Result<User> {
    let email = new_user.email.clone();
    let admin = connections.exclusive()?.transaction(|conn| {
        usecases::create_new_user(conn, new_user, Role::Admin).map_err(|err| {
            warn!("Failed to create admin with email {email}: {err}");
            err
        })
    })?;
    info!("Created admin #{} with email {}", admin.id, admin.email);
    Ok(admin)
}
