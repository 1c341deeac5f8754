// file: src/site/nginx.rs
// version: 1.0.0
// guid: 6d0c3a95-b1e7-4f28-a4d6-9e5b2c7f1803

//! nginx virtual host configuration for a WordPress site

use super::compose::{APP_SERVICE, FASTCGI_PORT};
use super::SiteName;

/// Render the `server` block that fronts php-fpm for `site`
pub fn render(site: &SiteName) -> String {
    format!(
        r#"server {{
    listen 80;
    server_name {site};
    root /var/www/html;
    index index.php;

    location / {{
        try_files $uri $uri/ /index.php?$args;
    }}

    location ~ \.php$ {{
        include fastcgi_params;
        fastcgi_pass {upstream}:{port};
        fastcgi_index index.php;
        fastcgi_param SCRIPT_FILENAME $document_root$fastcgi_script_name;
    }}
}}
"#,
        site = site,
        upstream = APP_SERVICE,
        port = FASTCGI_PORT,
    )
}
