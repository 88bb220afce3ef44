use pluvial_core::ShareChannel;
use url::Url;

const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";
const WHATSAPP_SEND: &str = "https://api.whatsapp.com/send";

/// Web share link for `channel` carrying `text`, or `None` when the channel
/// has no text-share endpoint (Instagram).
pub fn share_url(channel: ShareChannel, text: &str) -> Option<String> {
    let mut url = match channel {
        ShareChannel::Facebook => Url::parse(FACEBOOK_SHARER).ok()?,
        ShareChannel::WhatsApp => Url::parse(WHATSAPP_SEND).ok()?,
        ShareChannel::Instagram => return None,
    };
    {
        let mut query = url.query_pairs_mut();
        match channel {
            // Facebook ignores `quote` unless a `u` parameter is present.
            ShareChannel::Facebook => {
                query.append_pair("u", "").append_pair("quote", text);
            }
            ShareChannel::WhatsApp => {
                query.append_pair("text", text);
            }
            ShareChannel::Instagram => {}
        }
    }
    Some(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instagram_has_no_url() {
        assert_eq!(share_url(ShareChannel::Instagram, "hi"), None);
    }

    #[test]
    fn facebook_keeps_empty_u_parameter() {
        let url = share_url(ShareChannel::Facebook, "a b").unwrap();
        assert_eq!(
            url,
            "https://www.facebook.com/sharer/sharer.php?u=&quote=a+b"
        );
    }
}
