//! The built-in gateway error table.
//!
//! Entries are kept in ascending numeric order; `all_codes` relies on it.

use crate::catalogue::ErrorEntry;

pub(crate) static BUILTIN_ENTRIES: [ErrorEntry; 7] = [
    ErrorEntry {
        code: "401",
        title: "Unauthorized",
        description: "Authentication is required and has failed or has not been provided.",
        troubleshooting: &[
            "Verify authentication credentials are correct",
            "Check if authentication tokens have expired",
            "Review authentication middleware configuration",
            "Ensure proper headers are being sent (Authorization, API keys, etc.)",
            "Check if the authentication service is reachable",
        ],
    },
    ErrorEntry {
        code: "403",
        title: "Forbidden",
        description: "You do not have permission to access this resource.",
        troubleshooting: &[
            "Verify you have the necessary permissions",
            "Check authorization middleware configuration",
            "Review access control lists (ACLs) and IP whitelist/blacklist",
            "Ensure your role or group has proper access rights",
            "Check for CORS policy restrictions",
        ],
    },
    ErrorEntry {
        code: "404",
        title: "Page Not Found",
        description: "The page you are looking for does not exist or has been moved.",
        troubleshooting: &[
            "Check the URL for typos or mistakes",
            "Verify that the service is running and properly registered with Traefik",
            "Check your router configuration to ensure the path matches the request",
            "Review Traefik logs for routing decisions",
            "Ensure the backend service is healthy and responding",
        ],
    },
    ErrorEntry {
        code: "405",
        title: "Method Not Allowed",
        description: "The HTTP method used is not supported for this endpoint.",
        troubleshooting: &[
            "Verify you are using the correct HTTP method (GET, POST, PUT, DELETE, etc.)",
            "Check the API documentation for allowed methods",
            "Review your router configuration for method restrictions",
            "Ensure middleware is not blocking the request method",
            "Check if CORS settings are properly configured",
        ],
    },
    ErrorEntry {
        code: "500",
        title: "Internal Server Error",
        description: "The server encountered an unexpected condition that prevented it from fulfilling the request.",
        troubleshooting: &[
            "Check backend service logs for error details",
            "Verify the backend service is running and healthy",
            "Review Traefik logs for any middleware errors",
            "Check for resource constraints (memory, CPU, disk space)",
            "Verify database connections and external dependencies",
        ],
    },
    ErrorEntry {
        code: "502",
        title: "Bad Gateway",
        description: "Traefik received an invalid response from the upstream server.",
        troubleshooting: &[
            "Verify the backend service is running",
            "Check if the backend service is listening on the correct port",
            "Review backend service health checks",
            "Ensure network connectivity between Traefik and backend",
            "Check for timeout configurations that may be too short",
        ],
    },
    ErrorEntry {
        code: "503",
        title: "Service Unavailable",
        description: "The service is temporarily unavailable, possibly due to maintenance or overload.",
        troubleshooting: &[
            "Check if the service is under maintenance",
            "Verify backend service availability and health",
            "Review rate limiting and circuit breaker configurations",
            "Check if maximum connection limits have been reached",
            "Monitor service load and scale if necessary",
        ],
    },
];
