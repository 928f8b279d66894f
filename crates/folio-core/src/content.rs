//! Static modal content: certificates and project case studies.
//!
//! Populated at startup, never mutated. Bodies are trusted markup authored
//! here, injected verbatim into the modal body.

use fnv::FnvHashMap;

#[derive(Debug)]
pub struct ContentEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const ENTRIES: &[ContentEntry] = &[
    ContentEntry {
        id: "cert1",
        title: "AWS Solutions Architect - Professional",
        body: "\
<h3>AWS Solutions Architect - Professional</h3>\
<p><strong>Issued:</strong> 2023</p>\
<p><strong>Credential ID:</strong> AWS-SAP-2023-001</p>\
<p>Validates advanced technical skills and experience designing distributed \
applications and systems on the AWS platform.</p>\
<ul>\
<li>Design and deploy dynamically scalable applications</li>\
<li>Select appropriate AWS services for a given workload</li>\
<li>Migrate complex multi-tier applications to AWS</li>\
<li>Design and deploy enterprise-wide scalable operations</li>\
</ul>",
    },
    ContentEntry {
        id: "cert2",
        title: "Google Cloud Professional Cloud Developer",
        body: "\
<h3>Google Cloud Professional Cloud Developer</h3>\
<p><strong>Issued:</strong> 2022</p>\
<p><strong>Credential ID:</strong> GCP-PCD-2022-001</p>\
<p>Demonstrates proficiency designing, building and deploying applications \
on Google Cloud Platform.</p>\
<ul>\
<li>Design highly scalable and available applications</li>\
<li>Debug and monitor applications</li>\
<li>Integrate Google Cloud services</li>\
<li>Manage application data</li>\
</ul>",
    },
    ContentEntry {
        id: "cert3",
        title: "Microsoft Azure Developer Associate",
        body: "\
<h3>Microsoft Azure Developer Associate</h3>\
<p><strong>Issued:</strong> 2022</p>\
<p><strong>Credential ID:</strong> AZ-204-2022-001</p>\
<p>Validates cloud development skills across compute, storage, security \
and monitoring.</p>\
<ul>\
<li>Develop Azure compute solutions</li>\
<li>Develop for Azure storage</li>\
<li>Implement Azure security</li>\
<li>Monitor and optimize Azure solutions</li>\
</ul>",
    },
    ContentEntry {
        id: "cert4",
        title: "Certified Ethical Hacker (CEH)",
        body: "\
<h3>Certified Ethical Hacker (CEH)</h3>\
<p><strong>Issued:</strong> 2021</p>\
<p><strong>Credential ID:</strong> CEH-2021-001</p>\
<p>Demonstrates knowledge of security vulnerabilities and how to address \
them ethically.</p>\
<ul>\
<li>Vulnerability assessment and penetration testing</li>\
<li>Network security and intrusion detection</li>\
<li>Web application security</li>\
<li>Incident response and forensics</li>\
</ul>",
    },
    ContentEntry {
        id: "project1",
        title: "E-Commerce Platform",
        body: "\
<h3>Full-Stack E-Commerce Platform</h3>\
<p><strong>Technologies:</strong> React, Node.js, MongoDB, Stripe API</p>\
<p><strong>Duration:</strong> 6 months</p>\
<p>A comprehensive e-commerce solution featuring real-time inventory \
management, secure payment processing, and advanced analytics.</p>\
<h4>Key features:</h4>\
<ul>\
<li>Real-time inventory tracking and management</li>\
<li>Secure payment processing with Stripe integration</li>\
<li>Advanced search and filtering capabilities</li>\
<li>Admin dashboard with analytics and reporting</li>\
<li>Mobile-responsive design</li>\
<li>Multi-vendor support</li>\
</ul>\
<p><strong>Results:</strong> Increased client sales by 150% and reduced \
cart abandonment by 30%.</p>",
    },
    ContentEntry {
        id: "project2",
        title: "AI Chat Application",
        body: "\
<h3>AI-Powered Chat Application</h3>\
<p><strong>Technologies:</strong> Vue.js, Python, WebSocket, TensorFlow</p>\
<p><strong>Duration:</strong> 4 months</p>\
<p>Real-time chat application with AI-powered responses and sentiment \
analysis capabilities.</p>\
<h4>Key features:</h4>\
<ul>\
<li>Real-time messaging with WebSocket</li>\
<li>AI-powered chatbot responses</li>\
<li>Sentiment analysis of conversations</li>\
<li>Multi-language support</li>\
<li>File sharing and media support</li>\
<li>End-to-end encryption</li>\
</ul>\
<p><strong>Results:</strong> Achieved 95% user satisfaction rate and 40% \
reduction in response time.</p>",
    },
    ContentEntry {
        id: "project3",
        title: "Task Management System",
        body: "\
<h3>Collaborative Task Management System</h3>\
<p><strong>Technologies:</strong> Angular, Express.js, PostgreSQL, Socket.io</p>\
<p><strong>Duration:</strong> 5 months</p>\
<p>Advanced project management tool with real-time collaboration and \
comprehensive analytics.</p>\
<h4>Key features:</h4>\
<ul>\
<li>Real-time collaboration and updates</li>\
<li>Advanced project analytics and reporting</li>\
<li>Kanban and Gantt chart views</li>\
<li>Time tracking and resource management</li>\
<li>Integration with popular tools (Slack, GitHub)</li>\
<li>Custom workflow automation</li>\
</ul>\
<p><strong>Results:</strong> Improved team productivity by 60% and project \
delivery time by 25%.</p>",
    },
    ContentEntry {
        id: "project4",
        title: "Blockchain Wallet",
        body: "\
<h3>Multi-Chain Cryptocurrency Wallet</h3>\
<p><strong>Technologies:</strong> React Native, Solidity, Web3.js, Node.js</p>\
<p><strong>Duration:</strong> 8 months</p>\
<p>Secure cryptocurrency wallet supporting multiple blockchain networks \
with advanced security features.</p>\
<h4>Key features:</h4>\
<ul>\
<li>Multi-chain support (Bitcoin, Ethereum, Polygon)</li>\
<li>Hardware wallet integration</li>\
<li>DeFi protocol integration</li>\
<li>Advanced security with biometric authentication</li>\
<li>Portfolio tracking and analytics</li>\
<li>Cross-platform mobile application</li>\
</ul>\
<p><strong>Results:</strong> Successfully launched with 10,000+ active \
users and zero security incidents.</p>",
    },
];

/// Identifier -> entry lookup built once over [`ENTRIES`].
#[derive(Debug)]
pub struct ContentRegistry {
    map: FnvHashMap<&'static str, &'static ContentEntry>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        let map = ENTRIES.iter().map(|e| (e.id, e)).collect();
        Self { map }
    }

    pub fn get(&self, id: &str) -> Option<&'static ContentEntry> {
        self.map.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
