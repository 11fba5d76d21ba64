//! Email address and domain string handling
//!
//! Splits addresses on the last `@` and walks the candidate suffixes of a
//! domain from most to least specific. This is the single implementation of
//! the matching walk; `DomainList` builds its lookups on top of it.

/// Extract the domain part of an email address.
///
/// The domain is everything after the *last* `@`, so quoted local parts
/// containing `@` still yield the right domain. Returns `None` when the
/// address has no `@` or the domain part is empty.
pub fn domain_of(address: &str) -> Option<&str> {
    let (_, domain) = address.rsplit_once('@')?;
    if domain.is_empty() {
        None
    } else {
        Some(domain)
    }
}

/// Candidate suffixes of a domain, most specific first.
///
/// `mail.example.com` yields `mail.example.com` then `example.com`. The bare
/// final label is never yielded: a top-level label on its own (`com`,
/// `localhost`) can never identify a provider, so it is not a candidate.
///
/// The walk is purely label-based and does not consult the public suffix
/// list; entries are expected to be registrable domains, which makes a
/// multi-label public suffix (`co.uk`) matchable only if someone lists it.
pub fn candidates(domain: &str) -> Candidates<'_> {
    Candidates {
        rest: Some(domain),
    }
}

/// Iterator returned by [`candidates`]
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Candidates<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let current = self.rest.take()?;
        // A candidate must keep at least two labels; stop at the bare label.
        let dot = current.find('.')?;
        self.rest = Some(&current[dot + 1..]);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_of() {
        assert_eq!(domain_of("user@mailinator.com"), Some("mailinator.com"));
        assert_eq!(domain_of("@mailinator.com"), Some("mailinator.com"));
        assert_eq!(domain_of("no-at-sign"), None);
        assert_eq!(domain_of(""), None);
    }

    #[test]
    fn test_domain_of_takes_last_at() {
        assert_eq!(domain_of("\"a@b\"@mailinator.com"), Some("mailinator.com"));
        assert_eq!(domain_of("a@b@c.example.com"), Some("c.example.com"));
    }

    #[test]
    fn test_domain_of_empty_domain() {
        assert_eq!(domain_of("user@"), None);
        assert_eq!(domain_of("@"), None);
    }

    #[test]
    fn test_candidates_walk() {
        let all: Vec<&str> = candidates("mail.example.com").collect();
        assert_eq!(all, vec!["mail.example.com", "example.com"]);

        let all: Vec<&str> = candidates("deep.sub.mailinator.com").collect();
        assert_eq!(
            all,
            vec!["deep.sub.mailinator.com", "sub.mailinator.com", "mailinator.com"]
        );
    }

    #[test]
    fn test_candidates_exclude_bare_label() {
        assert_eq!(candidates("example.com").collect::<Vec<_>>(), vec!["example.com"]);
        assert!(candidates("localhost").next().is_none());
        assert!(candidates("com").next().is_none());
        assert!(candidates("").next().is_none());
    }
}
