//! Global CSS styles for the portfolio page.
//!
//! Dark theme with an emerald accent.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --primary-color: #10b981;
  --primary-glow: rgba(16, 185, 129, 0.3);

  --bg-primary: #0a0a0a;
  --bg-secondary: #111113;
  --bg-tertiary: #1c1c1f;
  --border-color: #27272a;

  --text-primary: #fafafa;
  --text-secondary: #a1a1aa;

  --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
  --nav-height: 80px;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
  background: var(--bg-primary);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
}

a { color: inherit; text-decoration: none; }

.app-root { height: 100vh; outline: none; }

/* === Page (scroll root) === */
.page {
  height: 100vh;
  overflow-y: auto;
  overflow-x: hidden;
}

.page.scroll-locked { overflow: hidden; }

.startup-error {
  padding: 2rem;
  color: var(--text-secondary);
}

/* === Navbar === */
.navbar {
  position: sticky;
  top: 0;
  z-index: 100;
  height: var(--nav-height);
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 2rem;
  backdrop-filter: blur(10px);
  border-bottom: 1px solid var(--border-color);
  transition: background var(--transition-normal);
}

.nav-brand { font-weight: 700; font-size: 1.25rem; }

.nav-menu {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-link {
  position: relative;
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.nav-link::after {
  content: '';
  position: absolute;
  left: 0;
  bottom: -4px;
  width: 0;
  height: 2px;
  background: var(--primary-color);
  transition: width var(--transition-normal);
}

.nav-link:hover,
.nav-link.active { color: var(--text-primary); }

.nav-link:hover::after,
.nav-link.active::after { width: 100%; }

.nav-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
}

.nav-toggle .bar {
  width: 24px;
  height: 2px;
  background: var(--text-primary);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.nav-toggle.active .bar:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.nav-toggle.active .bar:nth-child(2) { opacity: 0; }
.nav-toggle.active .bar:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

@media (max-width: 768px) {
  .nav-toggle { display: flex; }

  .nav-menu {
    position: absolute;
    top: var(--nav-height);
    left: -100%;
    width: 100%;
    flex-direction: column;
    align-items: center;
    padding: 2rem 0;
    background: var(--bg-secondary);
    transition: left var(--transition-normal);
  }

  .nav-menu.active { left: 0; }
}

/* === Sections === */
.section, .hero {
  max-width: 1100px;
  margin: 0 auto;
  padding: 5rem 2rem;
}

.section-title {
  font-size: 2rem;
  margin-bottom: 2rem;
}

.hero {
  min-height: calc(100vh - var(--nav-height));
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
}

.hero-title { font-size: 3rem; }
.hero-role { color: var(--primary-color); font-size: 1.25rem; }
.hero-tagline { color: var(--text-secondary); margin-top: 1rem; }

/* === Profile image === */
.profile-image-container {
  position: relative;
  width: 160px;
  height: 160px;
  margin: 0 auto 2rem;
  border-radius: 50%;
  border: 2px dashed var(--border-color);
  overflow: hidden;
}

.profile-image-container.has-image {
  border: 2px solid var(--primary-color);
  box-shadow: 0 0 24px var(--primary-glow);
}

.profile-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.profile-placeholder {
  width: 100%;
  height: 100%;
  align-items: center;
  justify-content: center;
  font-size: 3rem;
  font-weight: 700;
  color: var(--text-secondary);
  background: var(--bg-tertiary);
}

.profile-upload-btn {
  position: absolute;
  right: 8px;
  bottom: 8px;
  width: 36px;
  height: 36px;
  border-radius: 50%;
  border: 1px solid var(--border-color);
  background: var(--bg-secondary);
  cursor: pointer;
}

/* === About / stats / skills === */
.about-text p { color: var(--text-secondary); margin-bottom: 1rem; }

.stats, .skills-grid, .projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1.5rem;
  margin-top: 2rem;
}

.stat-item, .skill-item, .contact-item, .project-card {
  background: var(--bg-secondary);
  border: 1px solid var(--border-color);
  border-radius: 12px;
  padding: 1.5rem;
}

.stat-value { display: block; font-size: 2rem; color: var(--primary-color); }
.stat-label { color: var(--text-secondary); }
.skill-item ul { list-style: none; color: var(--text-secondary); }

/* === Fade-in reveal === */
.reveal {
  opacity: 0;
  transform: translateY(20px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal.visible {
  opacity: 1;
  transform: translateY(0);
}

/* === Projects === */
.project-card { padding: 0; overflow: hidden; }
.project-body { padding: 1.5rem; }
.project-image { width: 100%; aspect-ratio: 16 / 9; object-fit: cover; display: block; }
.project-image.pending { background: var(--bg-tertiary); }
.project-summary { color: var(--text-secondary); margin: 0.5rem 0 1rem; }
.project-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem; }

.tag {
  font-size: 0.75rem;
  padding: 0.2rem 0.6rem;
  border-radius: 999px;
  background: var(--bg-tertiary);
  color: var(--text-secondary);
}

.btn {
  padding: 0.5rem 1rem;
  border-radius: 8px;
  border: 1px solid var(--primary-color);
  background: transparent;
  color: var(--primary-color);
  cursor: pointer;
}

.btn:hover { background: var(--primary-color); color: var(--text-primary); }

/* === Contact === */
.contact-list { display: flex; flex-direction: column; gap: 1rem; }

.contact-item {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.contact-label { min-width: 80px; color: var(--text-secondary); }
.contact-value { flex: 1; }

.copy-btn {
  padding: 0.35rem 0.9rem;
  border-radius: 6px;
  border: 1px solid var(--border-color);
  background: var(--bg-tertiary);
  color: var(--text-secondary);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.copy-btn.copied {
  background: var(--primary-color);
  border-color: var(--primary-color);
  color: var(--text-primary);
}

/* === Modal === */
.modal {
  position: fixed;
  inset: 0;
  z-index: 1000;
  display: none;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.8);
}

.modal.active { display: flex; }

.modal-dialog {
  position: relative;
  width: min(720px, 90vw);
  max-height: 85vh;
  overflow-y: auto;
  padding: 2rem;
  border-radius: 12px;
  background: var(--bg-secondary);
  border: 1px solid var(--border-color);
}

.modal-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
  background: none;
  border: none;
  color: var(--text-secondary);
  font-size: 1.75rem;
  cursor: pointer;
}

.modal-content h3 { margin-bottom: 1rem; }
.modal-content ul { margin: 1rem 0 1rem 1.5rem; color: var(--text-secondary); }
.modal-content table { border-collapse: collapse; margin-top: 1rem; }
.modal-content th, .modal-content td { border: 1px solid var(--border-color); padding: 0.4rem 0.8rem; }

/* === Footer === */
.footer {
  text-align: center;
  padding: 2rem;
  color: var(--text-secondary);
  border-top: 1px solid var(--border-color);
}
"#;
