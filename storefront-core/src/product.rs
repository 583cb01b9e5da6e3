// Product repo/service layer
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

/// Create a new product
pub fn create(
    db: &db::DatabaseEnvironment,
    r_product: &reqres::ProductRequest,
) -> Result<Product, StorefrontError> {
    validate_product(r_product)?;
    let pid: String = format!("{}{}", crate::PRODUCT_DB_KEY, utils::generate_rnd());
    let description = r_product.description.as_deref().unwrap_or_default();
    let new_product = Product {
        pid: String::from(&pid),
        name: String::from(r_product.name.trim()),
        description: String::from(description),
        price: r_product.price,
        qty: r_product.qty,
        in_stock: r_product.qty > 0,
        created: chrono::offset::Utc::now().timestamp(),
    };
    debug!("insert product: {:?}", &new_product);
    let v = bincode::serialize(&new_product)?;
    db.write(pid.as_bytes(), &v)?;
    // in order to retrieve all products, write keys to with pl
    debug!(
        "writing product index {} for id: {}",
        crate::PRODUCT_LIST_DB_KEY,
        &pid
    );
    db.append_index(crate::PRODUCT_LIST_DB_KEY, &pid)?;
    Ok(new_product)
}

/// Single Product lookup
pub fn find(db: &db::DatabaseEnvironment, pid: &str) -> Result<Product, StorefrontError> {
    if !utils::is_record_id(crate::PRODUCT_DB_KEY, pid) {
        return Err(StorefrontError::NotFound);
    }
    let r = db.read(pid.as_bytes())?;
    if r.is_empty() {
        error!("product not found");
        return Err(StorefrontError::NotFound);
    }
    let product: Product = bincode::deserialize(&r[..])?;
    Ok(product)
}

/// Product lookup for all
pub fn find_all(db: &db::DatabaseEnvironment) -> Result<Vec<Product>, StorefrontError> {
    let v_pid = db.read_index(crate::PRODUCT_LIST_DB_KEY)?;
    let mut products: Vec<Product> = Vec::with_capacity(v_pid.len());
    for p in v_pid {
        products.push(find(db, &p)?);
    }
    Ok(products)
}

/// check product field lengths to prevent db spam
fn validate_product(p: &reqres::ProductRequest) -> Result<(), StorefrontError> {
    info!("validating product: {}", &p.name);
    let name = p.name.trim();
    if name.is_empty() {
        return Err(StorefrontError::Validation(String::from("name is required")));
    }
    let description_len = p.description.as_ref().map_or(0, String::len);
    if name.len() >= utils::string_limit() || description_len >= utils::string_limit() {
        return Err(StorefrontError::Validation(String::from("field too long")));
    }
    Ok(())
}

// Tests
//-------------------------------------------------------------------------------
