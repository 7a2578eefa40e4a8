use super::*;

/// HS256 signing and verification of session [`Claims`].
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
    validation: jsonwebtoken::Validation,
}

impl Crypto {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::HS256);
        validation.leeway = 0;
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
            validation,
        }
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding)
    }
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
    }
    pub fn hash(text: &str) -> Vec<u8> {
        use sha2::Digest;
        sha2::Sha256::digest(text.as_bytes()).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_what_it_encodes() {
        let crypto = Crypto::new(b"key");
        let claims = Claims::new("warden".into());
        let token = crypto.encode(&claims).unwrap();
        assert_eq!(crypto.decode(&token).unwrap(), claims);
    }

    #[test]
    fn rejects_foreign_key() {
        let token = Crypto::new(b"one").encode(&Claims::new("warden".into())).unwrap();
        assert!(Crypto::new(b"two").decode(&token).is_err());
    }

    #[test]
    fn rejects_expired_with_zero_leeway() {
        let crypto = Crypto::new(b"key");
        let mut claims = Claims::new("warden".into());
        claims.iat -= 120;
        claims.exp = claims::now() - 1;
        let token = crypto.encode(&claims).unwrap();
        assert!(crypto.decode(&token).is_err());
    }
}
