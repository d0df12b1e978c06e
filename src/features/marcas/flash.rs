use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::shared::constants::FLASH_COOKIE;

/// Notices shown on the marcas index after a redirect.
///
/// The cookie carries only the key; the text never leaves the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Created,
    Updated,
    Deleted,
}

impl Flash {
    pub fn key(self) -> &'static str {
        match self {
            Flash::Created => "marca_created",
            Flash::Updated => "marca_updated",
            Flash::Deleted => "marca_deleted",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "marca_created" => Some(Flash::Created),
            "marca_updated" => Some(Flash::Updated),
            "marca_deleted" => Some(Flash::Deleted),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Flash::Created => "Marca creada exitosamente",
            Flash::Updated => "Marca actualizada exitosamente",
            Flash::Deleted => "Marca eliminada exitosamente",
        }
    }
}

/// Queue a flash for the next page load
pub fn set_flash(jar: CookieJar, flash: Flash) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, flash.key()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Read the pending flash, if any, and clear it
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };
    let flash = Flash::from_key(cookie.value());

    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), flash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for flash in [Flash::Created, Flash::Updated, Flash::Deleted] {
            assert_eq!(Flash::from_key(flash.key()), Some(flash));
        }
        assert_eq!(Flash::from_key("<script>"), None);
    }

    #[test]
    fn test_take_flash_consumes_cookie() {
        let jar = CookieJar::new().add(Cookie::new(FLASH_COOKIE, "marca_updated"));

        let (jar, flash) = take_flash(jar);
        assert_eq!(flash, Some(Flash::Updated));
        assert!(jar.get(FLASH_COOKIE).is_none());

        let (_, flash) = take_flash(jar);
        assert_eq!(flash, None);
    }
}
