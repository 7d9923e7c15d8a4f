#[cfg(test)]
mod env_vars;
#[cfg(test)]
mod health_check;
